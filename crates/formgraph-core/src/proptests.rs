//! Property-based tests for paths and the resolver.
