//! ModelCompiler port - the external Stan compiler
//!
//! BFG only needs to hand over a model file. Whatever the compiler writes
//! next to it is swept up later by `package_artifacts`.

use std::path::Path;

use crate::error::BfgResult;

pub trait ModelCompiler {
    /// Compile the model file in place
    fn compile(&self, model_file: &Path) -> BfgResult<()>;
}

impl<T: ModelCompiler + ?Sized> ModelCompiler for &T {
    fn compile(&self, model_file: &Path) -> BfgResult<()> {
        (**self).compile(model_file)
    }
}
