use std::env;

use crop_transparent::{crop_transparent, CropOutcome};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: crop-transparent <input_path> <output_path>");
        return;
    }

    // Failures become a printed line; the process exits normally either way
    match crop_transparent(&args[1], &args[2]) {
        Ok(CropOutcome::Cropped { width, height }) => {
            println!("Cropped image saved to {}", args[2]);
            println!("New size: ({}, {})", width, height);
        }
        Ok(CropOutcome::FullyTransparent) => {
            println!("Image is fully transparent.");
        }
        Err(err) => {
            println!("Error: {}", err);
        }
    }
}
