mod rendering;
mod scenarios;
mod shell_flow;
