use crate::tag;
use anyhow::Result;

pub fn run() -> Result<()> {
    println!("{}", tag::random_tag());
    Ok(())
}
