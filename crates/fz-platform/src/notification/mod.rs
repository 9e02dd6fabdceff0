mod terminal;

pub use terminal::TerminalNotifier;
