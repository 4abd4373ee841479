//! Command implementations for the rcd CLI.
//!
//! Dashboards are read from JSON definition files, or the built-in
//! analytics dashboard when no file is given.

use clap::Subcommand;

pub mod dashboard;
#[cfg(feature = "api")]
pub mod membership;
pub mod usage;

#[derive(Subcommand)]
pub enum Command {
    /// Render a dashboard to an HTML page
    Render {
        /// Dashboard definition (JSON); defaults to the analytics dashboard
        #[arg(short = 'd', long)]
        dashboard: Option<String>,

        /// Output path for the HTML page
        #[arg(short = 'o', long)]
        output: String,

        /// Fail instead of leaving regions empty when a chart is invalid
        #[arg(long)]
        strict: bool,
    },

    /// Check every chart in a dashboard without writing anything
    Validate {
        #[arg(short = 'd', long)]
        dashboard: Option<String>,
    },

    /// Export one chart's series as CSV
    ExportCsv {
        #[arg(short = 'd', long)]
        dashboard: Option<String>,

        /// Target id of the chart, e.g. rate_of_usage_chart_core
        #[arg(short = 'c', long)]
        chart: String,

        /// Output path; stdout when omitted
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Write the built-in analytics dashboard definition as JSON
    Preset {
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Build usage charts from compute and storage CSV files
    Usage {
        /// Daily compute CSV (date,project,number_jobs,cpu_time,wait_time,wall_time)
        #[arg(long)]
        compute: String,

        /// Weekly storage CSV (date,project,home_space_used,home_files_used,scratch_space_used,scratch_files_used)
        #[arg(long)]
        storage: Option<String>,

        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Only include this project code
        #[arg(long)]
        project: Option<String>,

        /// Output path
        #[arg(short = 'o', long)]
        output: String,

        /// Write the dashboard definition as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Update a project membership request's status
    #[cfg(feature = "api")]
    SetStatus {
        /// Portal origin, e.g. https://portal.example.ac.uk
        #[arg(long)]
        origin: String,

        /// Path the request id is appended to
        #[arg(long, default_value = "/projects/membership-requests/update/")]
        base: String,

        #[arg(long)]
        request_id: u64,

        #[arg(long)]
        project_id: u64,

        /// Status code (1 awaiting, 2 authorised, 3 declined, 4 revoked, 5 suspended)
        #[arg(long)]
        status: u8,

        #[arg(long)]
        csrf_token: String,

        /// Report failures instead of treating them like a reload
        #[arg(long)]
        show_message: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            dashboard,
            output,
            strict,
        } => dashboard::run_render(dashboard.as_deref(), &output, strict),
        Command::Validate { dashboard } => dashboard::run_validate(dashboard.as_deref()),
        Command::ExportCsv {
            dashboard,
            chart,
            output,
        } => dashboard::run_export_csv(dashboard.as_deref(), &chart, output.as_deref()),
        Command::Preset { output } => dashboard::run_preset(output.as_deref()),
        Command::Usage {
            compute,
            storage,
            start,
            end,
            project,
            output,
            json,
        } => usage::run_usage(&usage::UsageArgs {
            compute,
            storage,
            start,
            end,
            project,
            output,
            json,
        }),
        #[cfg(feature = "api")]
        Command::SetStatus {
            origin,
            base,
            request_id,
            project_id,
            status,
            csrf_token,
            show_message,
        } => membership::run_set_status(
            &origin,
            &base,
            request_id,
            project_id,
            status,
            &csrf_token,
            show_message,
        ),
    }
}
