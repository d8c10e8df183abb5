pub mod random_ride;
