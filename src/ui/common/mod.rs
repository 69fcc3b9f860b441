//! Building blocks shared by several pages

pub mod form;
pub mod intro;
pub mod tabs;

pub use form::FormField;
pub use intro::PageIntro;
pub use tabs::{PillTabs, TabItem, TabPanel};
