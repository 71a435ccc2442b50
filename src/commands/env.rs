// ABOUTME: Env command implementation.
// ABOUTME: Prints the LP_ENV_ variables forwarded to the deployed application.

use launchpad::environment;
use launchpad::output::Output;

pub fn print_env(output: &Output) {
    output.result(&environment::from_process_env());
}
