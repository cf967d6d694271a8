pub mod authorization_middleware;
