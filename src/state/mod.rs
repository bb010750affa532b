pub mod counter;
pub mod debounce;
pub mod filter;
pub mod form;
pub mod nav;
pub mod notices;
pub mod tilt;
pub mod transition;

pub use counter::CounterAnimation;
pub use debounce::Debounce;
pub use filter::{FilterAction, ProjectFilter, filter_keys};
pub use nav::{NavAction, NavState, SectionSpan, active_section};
pub use notices::{NoticeAction, NoticeBoard};
pub use tilt::{CardRect, Tilt};
pub use transition::Phase;
