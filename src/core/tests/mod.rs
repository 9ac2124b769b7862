mod compiler_tests;
mod engine_tests;
