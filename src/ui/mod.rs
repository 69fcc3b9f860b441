pub mod common;
pub mod dom;
pub mod footer;
pub mod hero;
pub mod marquee;
pub mod navbar;
pub mod pages;
pub mod seo;

pub use footer::Footer;
pub use navbar::Navbar;
pub use pages::*;
