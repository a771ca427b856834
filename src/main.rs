fn main() -> Result<(), Box<dyn std::error::Error>> {
    cadenza::runtime::run()
}
