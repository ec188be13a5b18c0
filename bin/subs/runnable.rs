use anyhow::Result;

pub trait RunnableSubcommand {
    fn run(&self) -> Result<()>;
}
