#![deny(clippy::all)]
#![forbid(unsafe_code)]

use log::error;

mod auxiliary;
mod life;

fn main() {
    env_logger::init();

    println!("Conway's Game of Life");
    println!("\nControls:\nP: pause\nSPACE: frame by frame\nR: reseed\nC: clear screen\nESC: quit");

    if let Err(e) = life::run_life() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
