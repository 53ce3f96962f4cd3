fn main() -> Result<(), Box<dyn std::error::Error>> {
    harmony::runtime::run()
}
