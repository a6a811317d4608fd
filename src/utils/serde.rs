pub mod string_option;
