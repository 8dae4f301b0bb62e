mod root;
mod state;

pub(crate) use state::PersistedSettings;

pub use root::App;
