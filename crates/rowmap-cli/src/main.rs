fn main() -> anyhow::Result<()> {
    rowmap_cli::RowmapCli::new().parse_and_run()
}
