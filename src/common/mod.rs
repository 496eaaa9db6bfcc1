pub mod logging_setup;
