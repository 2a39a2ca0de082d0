pub mod consts;
pub mod date;
pub mod file;
pub mod json;
pub mod meta;
pub mod string;
pub mod thread;
pub mod tracking;

#[cfg(test)]
mod __tests__;
#[cfg(test)]
mod examples;
