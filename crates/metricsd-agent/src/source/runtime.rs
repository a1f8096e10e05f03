use rand::Rng;
use sysinfo::{Pid, System};

use metricsd_core::error::Result;

use super::{Snapshot, SnapshotSource, RANDOM_VALUE};

/// Process and host memory statistics plus one random sample.
pub struct RuntimeSource {
    system: System,
    pid: Option<Pid>,
}

impl RuntimeSource {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!(error = e, "current pid unavailable, process samples disabled");
                None
            }
        };
        Self {
            system: System::new(),
            pid,
        }
    }

    fn sample_process(&mut self, out: &mut Snapshot) {
        let Some(pid) = self.pid else { return };
        if !self.system.refresh_process(pid) {
            return;
        }
        let Some(process) = self.system.process(pid) else { return };

        out.insert("ProcessResident".into(), process.memory() as f64);
        out.insert("ProcessVirtual".into(), process.virtual_memory() as f64);
        out.insert("ProcessCpuPercent".into(), f64::from(process.cpu_usage()));
        out.insert("ProcessRunTime".into(), process.run_time() as f64);
    }
}

impl Default for RuntimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSource for RuntimeSource {
    fn name(&self) -> &str {
        "runtime"
    }

    fn sample(&mut self) -> Result<Snapshot> {
        self.system.refresh_memory();
        let mut out = Snapshot::new();

        out.insert("TotalMemory".into(), self.system.total_memory() as f64);
        out.insert("UsedMemory".into(), self.system.used_memory() as f64);
        out.insert("FreeMemory".into(), self.system.free_memory() as f64);
        out.insert("AvailableMemory".into(), self.system.available_memory() as f64);
        out.insert("TotalSwap".into(), self.system.total_swap() as f64);
        out.insert("UsedSwap".into(), self.system.used_swap() as f64);

        let load = System::load_average();
        out.insert("LoadAverage1".into(), load.one);
        out.insert("LoadAverage5".into(), load.five);
        out.insert("LoadAverage15".into(), load.fifteen);

        self.sample_process(&mut out);

        out.insert(RANDOM_VALUE.into(), rand::thread_rng().gen::<f64>());
        Ok(out)
    }
}
