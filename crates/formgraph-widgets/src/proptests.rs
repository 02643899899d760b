//! Property-based tests for input parsing and list binding.
