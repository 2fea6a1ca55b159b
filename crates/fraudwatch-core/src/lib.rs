pub mod admin;
pub mod counter;
pub mod format;
pub mod messages;
pub mod session;
pub mod submission;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;
