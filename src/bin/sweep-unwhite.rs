use pngsweep::operations::{Operation, RemoveWhiteSettings};

fn main() {
    pngsweep::tool_main(
        "sweep-unwhite",
        Operation::RemoveWhite(RemoveWhiteSettings::default()),
    );
}
