//! Single-line editing state machine.
//!
//! # Architecture
//!
//! - [`EditBuffer`]: codepoint-indexed buffer that enforces [`EditConstraints`]
//! - [`Caret`]: insertion point
//! - [`Highlight`]: leftward-growing selection with cached shadow text and width
//! - [`ScrollState`]: horizontal pixel offset into the edit rectangle
//! - [`CaretBlink`]: time-driven caret visibility
//! - [`EditableState`]: ties the above together; driven by [`EditAction`]s
//!
//! # Example
//!
//! ```ignore
//! use editfield::editable::{EditableState, EditConstraints, TextAlign};
//! use editfield::metrics::MonospaceMetrics;
//!
//! let metrics = MonospaceMetrics::new(10);
//! let mut state = EditableState::new(EditConstraints::printable(), TextAlign::Left, 200);
//! state.set_content("hello", &metrics);
//! state.move_end(&metrics);
//! state.insert_char('!', &metrics);
//!
//! assert_eq!(state.text(), "hello!");
//! ```

mod blink;
mod buffer;
mod constraints;
mod cursor;
mod messages;
mod scroll;
mod selection;
mod state;

pub use blink::{CaretBlink, DEFAULT_BLINK_INTERVAL};
pub use buffer::EditBuffer;
pub use constraints::{is_printable, CharFilter, EditConstraints, EXTENDED_THRESHOLD};
pub use cursor::Caret;
pub use messages::{EditAction, MoveTarget};
pub use scroll::{ScrollState, TextAlign};
pub use selection::Highlight;
pub use state::EditableState;
