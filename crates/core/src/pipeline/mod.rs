pub mod digest_use_case;
