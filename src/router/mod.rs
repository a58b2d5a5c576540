mod lazy;
mod navigator;
mod route;

pub use lazy::LazyView;
pub use navigator::{provide_navigator, use_navigator, AboutContent, Navigator};
pub use route::{Route, ROUTES};
