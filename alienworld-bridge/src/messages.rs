//! Message enum.

use iced::time::Instant;

#[derive(Clone, Debug)]
pub enum Message {
    /// Periodic frame tick; drives the simulation clock.
    Frame(Instant),
    /// The logon screen's login button.
    LoginClicked,
    Exit,
}
