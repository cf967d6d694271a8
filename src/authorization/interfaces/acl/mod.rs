pub mod request_ownership_facade;
