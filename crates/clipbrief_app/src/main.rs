mod platform;

fn main() -> Result<(), eframe::Error> {
    platform::run_app()
}
