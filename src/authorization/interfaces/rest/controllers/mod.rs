pub mod authorization_rest_controller;
