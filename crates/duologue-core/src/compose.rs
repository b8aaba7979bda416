//! Retrieved-context composer.
//!
//! Formats similarity-search results into the single text block that is
//! embedded in the generation prompt. Pure function, no side effects.

use duologue_types::retrieval::RetrievedChunk;

/// Sentinel emitted when the search returned no chunks.
pub const NO_MATCHES: &str = "(no matches)";

/// Rendering for a similarity score the backend failed to supply.
const SCORE_UNAVAILABLE: &str = "n/a";

/// Format retrieved chunks into one labeled context block per chunk.
///
/// Each block carries the chunk's 1-based position, its similarity score
/// to 3 decimal places, and its content:
///
/// ```text
/// [Source 1 | sim=0.842]
/// chunk content here
/// ```
///
/// Blocks are joined by a blank line, preserving input order. An empty
/// input yields exactly [`NO_MATCHES`]. A chunk with no similarity score
/// renders as `sim=n/a`.
pub fn compose(chunks: &[RetrievedChunk]) -> String {
    if chunks.is_empty() {
        return NO_MATCHES.to_string();
    }

    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let sim = match chunk.similarity {
                Some(score) => format!("{score:.3}"),
                None => SCORE_UNAVAILABLE.to_string(),
            };
            format!("[Source {} | sim={}]\n{}", i + 1, sim, chunk.content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_matches_sentinel() {
        assert_eq!(compose(&[]), "(no matches)");
    }

    #[test]
    fn test_single_chunk_block_format() {
        let chunks = vec![RetrievedChunk::new("X", 0.842)];
        assert_eq!(compose(&chunks), "[Source 1 | sim=0.842]\nX");
    }

    #[test]
    fn test_block_count_matches_input_length() {
        for n in 1..=6 {
            let chunks: Vec<RetrievedChunk> = (0..n)
                .map(|i| RetrievedChunk::new(format!("chunk {i}"), 0.9 - i as f64 * 0.1))
                .collect();
            let composed = compose(&chunks);
            assert_eq!(composed.matches("[Source ").count(), n);
        }
    }

    #[test]
    fn test_indices_are_one_based_and_increasing_in_input_order() {
        let chunks = vec![
            RetrievedChunk::new("first", 0.9),
            RetrievedChunk::new("second", 0.8),
            RetrievedChunk::new("third", 0.7),
        ];
        let composed = compose(&chunks);
        let pos1 = composed.find("[Source 1 | sim=0.900]\nfirst").unwrap();
        let pos2 = composed.find("[Source 2 | sim=0.800]\nsecond").unwrap();
        let pos3 = composed.find("[Source 3 | sim=0.700]\nthird").unwrap();
        assert!(pos1 < pos2);
        assert!(pos2 < pos3);
    }

    #[test]
    fn test_scores_render_with_exactly_three_decimals() {
        let chunks = vec![
            RetrievedChunk::new("a", 0.5),
            RetrievedChunk::new("b", 0.123456),
            RetrievedChunk::new("c", 1.0),
        ];
        let composed = compose(&chunks);
        assert!(composed.contains("sim=0.500"));
        assert!(composed.contains("sim=0.123"));
        assert!(composed.contains("sim=1.000"));
    }

    #[test]
    fn test_missing_score_renders_as_na() {
        let chunks = vec![RetrievedChunk {
            content: "scoreless".to_string(),
            similarity: None,
        }];
        assert_eq!(compose(&chunks), "[Source 1 | sim=n/a]\nscoreless");
    }

    #[test]
    fn test_blocks_joined_by_blank_line() {
        let chunks = vec![
            RetrievedChunk::new("a", 0.9),
            RetrievedChunk::new("b", 0.8),
        ];
        assert_eq!(
            compose(&chunks),
            "[Source 1 | sim=0.900]\na\n\n[Source 2 | sim=0.800]\nb"
        );
    }
}
