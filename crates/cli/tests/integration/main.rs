mod bind_tests;
mod common;
