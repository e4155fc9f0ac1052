pub mod pages_test;
