use super::*;

mod require;
