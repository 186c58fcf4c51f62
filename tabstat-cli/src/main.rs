fn main() -> anyhow::Result<()> {
    tabstat_cli::run()
}
