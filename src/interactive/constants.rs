//! Constants for the interactive TUI module
//!
//! This module centralizes magic numbers and user-facing strings so the
//! state machine, the renderer and the tests agree on them.

/// The only error text a failed search ever shows.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str = "Backend temporarily unavailable.";

/// Shown in the results region for a successful search with no records.
pub const NO_RESULTS_MESSAGE: &str = "No matching faculty found.";

pub const LOADING_MESSAGE: &str = "Searching for faculty...";

pub const SEARCH_PLACEHOLDER: &str = "e.g. Machine Learning";

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// Timing constants
/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the hero header before the results have been scrolled into view
pub const HERO_HEIGHT: u16 = 5;

/// Height of the hero header once collapsed to a title bar
pub const COLLAPSED_HERO_HEIGHT: u16 = 1;

/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

pub const SEARCH_LABEL: &str = "[ Search ]";
pub const SEARCHING_LABEL: &str = "[ Searching... ]";

/// Width of the search button, borders included. Sized for the longer label.
pub const SEARCH_BUTTON_WIDTH: u16 = SEARCHING_LABEL.len() as u16 + 2;

/// Height of the line reserved for the error notice
pub const NOTICE_HEIGHT: u16 = 1;

/// Height of the footer with key hints and status messages
pub const FOOTER_HEIGHT: u16 = 1;

/// Page size for PageUp/PageDown navigation, in cards
pub const PAGE_SIZE: usize = 3;

/// Bio lines shown on a card while truncation is enabled
pub const TRUNCATED_BIO_LINES: usize = 2;

/// Left indent of card body lines, matching the "NN. " rank prefix
pub const CARD_INDENT: usize = 4;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

// Result detail layout constants
/// Height of the header block (specialization, rank score, profile link)
pub const RESULT_DETAIL_HEADER_HEIGHT: u16 = 5;
