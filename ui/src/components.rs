pub mod footer;
pub mod progress_bar;

pub use footer::Footer;
pub use progress_bar::ProgressBar;
