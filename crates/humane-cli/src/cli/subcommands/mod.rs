mod tag;

pub use tag::TagCommands;
