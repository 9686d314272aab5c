pub mod tests_map_semantics;
