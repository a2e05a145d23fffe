//! Build-time selection of the host's inspector.

#[cfg(any(target_os = "linux", target_os = "android"))]
mod imp {
    use crate::inspector::PagedInspector;
    use crate::os::Sysconf;

    pub type HostInspector = PagedInspector<Sysconf>;

    pub fn host_inspector() -> HostInspector {
        PagedInspector::new(Sysconf::new())
    }
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod imp {
    use crate::inspector::{ControlTableInspector, FreeMemoryPoint};
    use crate::os::{Sysconf, Sysctl};

    pub type HostInspector = ControlTableInspector<Sysconf, Sysctl>;

    pub fn host_inspector() -> HostInspector {
        ControlTableInspector::new(Sysconf::new(), Sysctl::new(), FreeMemoryPoint::DARWIN)
    }
}

#[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
mod imp {
    use crate::inspector::{ControlTableInspector, FreeMemoryPoint};
    use crate::os::{Sysconf, Sysctl};

    pub type HostInspector = ControlTableInspector<Sysconf, Sysctl>;

    pub fn host_inspector() -> HostInspector {
        ControlTableInspector::new(Sysconf::new(), Sysctl::new(), FreeMemoryPoint::FREEBSD)
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly"
)))]
mod imp {
    use crate::inspector::SysinfoInspector;

    pub type HostInspector = SysinfoInspector;

    pub fn host_inspector() -> HostInspector {
        SysinfoInspector::new()
    }
}

/// The inspector type used on this build target.
pub type HostInspector = imp::HostInspector;

/// Returns the inspector for the platform this crate was built for.
///
/// ## Examples
///
/// ```no_run
/// use meminspect_lib::{MemoryInspector, host_inspector};
///
/// let inspector = host_inspector();
/// println!("{} bytes installed", inspector.total_memory().unwrap());
/// ```
pub fn host_inspector() -> HostInspector {
    imp::host_inspector()
}
