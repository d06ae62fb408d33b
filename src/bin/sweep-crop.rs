use pngsweep::operations::{Operation, TrimSettings};

fn main() {
    pngsweep::tool_main("sweep-crop", Operation::Trim(TrimSettings::default()));
}
