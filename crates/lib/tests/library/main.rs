mod bind_tests;
mod common;
mod options_tests;
