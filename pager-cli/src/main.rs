fn main() -> anyhow::Result<()> {
    pager_cli::cli::run()
}
