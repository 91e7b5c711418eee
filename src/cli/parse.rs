use graphkit_core::format::OutputFormat;
use graphkit_core::graph::Strategy;
use graphkit_core::nine_tail::Board;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse search strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse nine-tail board from string
pub fn parse_board(s: &str) -> std::result::Result<Board, String> {
    s.parse::<Board>().map_err(|e| e.to_string())
}
