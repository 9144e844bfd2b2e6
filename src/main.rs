fn main() -> anyhow::Result<()> {
    swatchbook::run()?;
    Ok(())
}
