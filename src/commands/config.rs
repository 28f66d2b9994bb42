use crate::framework::AppData;

pub fn config(data: &AppData) -> crate::Result<()> {
    print!("{}", data.config().to_toml()?);
    Ok(())
}
