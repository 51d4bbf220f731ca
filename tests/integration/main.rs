mod common;

mod round_trips;
