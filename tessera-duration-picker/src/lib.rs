//! Constraint engine for hour/minute/second duration pickers.
//!
//! A duration picker shows three wheels (hours, minutes, seconds). This crate
//! holds everything about such a picker that is not drawing: how many rows
//! each wheel has, which rows are selectable with the other wheels where they
//! are, how an out-of-range scroll is snapped back, and when the selected
//! duration is reported.
//!
//! # Usage
//!
//! The UI owns a [`DurationConstraintEngine`], implements [`PickerHost`] for
//! whatever holds the wheel widgets, and forwards user scrolls:
//!
//! ```
//! use std::{sync::Arc, time::Duration};
//!
//! use tessera_duration_picker::{
//!     DurationConstraintEngine, PickerOptions, RowChange, Selection, Wheel,
//! };
//!
//! let mut engine = DurationConstraintEngine::new(
//!     &PickerOptions::default().maximum(Duration::from_secs(86_400)),
//! )
//! .expect("bounds are ordered");
//!
//! let listener = Arc::new(|duration: Duration| println!("picked {duration:?}"));
//! engine.set_listener(&listener);
//!
//! // `()` is a host that ignores move/reload instructions.
//! let selection = engine
//!     .select_duration(Duration::from_secs(3725), false, &mut ())
//!     .expect("within bounds");
//! assert_eq!(selection, Selection::new(1, 2, 5));
//! assert_eq!(engine.label_text(1, Wheel::Hours), "1 h");
//!
//! // 24h 2m 5s is past the maximum, so the hours wheel is pulled back.
//! let change = engine.handle_user_selected_row(24, Wheel::Hours, &mut ());
//! assert_eq!(change, RowChange::Corrected { wheel: Wheel::Hours, row: 23 });
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod bounds;
pub mod engine;
pub mod error;
pub mod host;
pub mod selection;
pub mod wheel;

pub use bounds::{Bounds, LARGEST_MAXIMUM, MaximumPolicy, ONE_DAY, PickerOptions};
pub use engine::{DurationConstraintEngine, RowChange};
pub use error::{PickerError, Result};
pub use host::{DurationListener, MoveReason, PickerHost, RowStyle, WheelMove};
pub use selection::Selection;
pub use wheel::Wheel;
