pub mod about;
pub mod initpage;
pub mod layout;
pub mod manager;
pub mod not_found;
pub mod reception;
pub mod room;
pub mod server;

pub use about::About;
pub use initpage::Initpage;
pub use layout::Layout;
pub use manager::Manager;
pub use not_found::NotFound;
pub use reception::Reception;
pub use room::Room;
pub use server::Server;

/// Format value for display
pub fn format_value(val: f64) -> String {
    if val.fract() == 0.0 {
        format!("{:.0}", val)
    } else {
        format!("{:.1}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::format_value;

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(format_value(22.0), "22");
        assert_eq!(format_value(22.5), "22.5");
        assert_eq!(format_value(-3.5), "-3.5");
    }
}
