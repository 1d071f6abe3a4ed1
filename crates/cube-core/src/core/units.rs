/// Length of one bohr (atomic unit of length) in angstrom.
pub const AU_TO_ANGSTROM: f64 = 0.5291771;

/// One hartree expressed in wavenumbers (cm^-1).
pub const AU_TO_WAVENUMBER: f64 = 2.194746e5;

#[inline]
pub fn bohr_to_angstrom(value: f64) -> f64 {
    value * AU_TO_ANGSTROM
}

#[inline]
pub fn angstrom_to_bohr(value: f64) -> f64 {
    value / AU_TO_ANGSTROM
}

#[inline]
pub fn hartree_to_wavenumber(value: f64) -> f64 {
    value * AU_TO_WAVENUMBER
}
