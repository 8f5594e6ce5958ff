use gowest_cli::run;

fn main() -> anyhow::Result<()> {
    run()
}
