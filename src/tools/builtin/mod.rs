//! Built-in tools

mod evaluate_math_expression;
mod get_current_temperature;
mod get_file_content;
mod get_files_info;
mod run_python_file;
mod write_file;

pub use evaluate_math_expression::EvaluateMathExpressionTool;
pub use get_current_temperature::GetCurrentTemperatureTool;
pub use get_file_content::GetFileContentTool;
pub use get_files_info::GetFilesInfoTool;
pub use run_python_file::RunPythonFileTool;
pub use write_file::WriteFileTool;
