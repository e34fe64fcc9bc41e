mod domain_tests;
mod extract_tests;
