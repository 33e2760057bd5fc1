/// Keywords used when none are given on the command line or in a file.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "outdoor-rug-1",
    "outdoor-rug-2",
    "outdoor-rug-3",
    "solar-garden-lights-1",
    "solar-garden-lights-2",
    "outdoor-lantern-set-1",
    "outdoor-lantern-set-2",
    "garden-fountain-1",
    "garden-fountain-2",
    "garden-fountain-3",
    "garden-planter-box-1",
    "garden-planter-box-2",
    "garden-planter-box-3",
    "folding-deck-chair-1",
    "folding-deck-chair-2",
    "hanging-egg-chair-1",
    "hanging-egg-chair-2",
    "hanging-egg-chair-3",
    "stackable-outdoor-chairs-1",
    "stackable-outdoor-chairs-2",
    "stackable-outdoor-chairs-3",
    "outdoor-rocking-chair-1",
    "outdoor-rocking-chair-2",
    "outdoor-rocking-chair-3",
    "garden-lounge-chair-1",
    "garden-lounge-chair-2",
    "adirondack-chair-set-1",
    "adirondack-chair-set-2",
    "adirondack-chair-set-3",
    "fire-pit-table-set-1",
    "fire-pit-table-set-2",
    "fire-pit-table-set-3",
    "bistro-set-1",
    "bistro-set-2",
    "outdoor-sofa-set-1",
    "outdoor-sofa-set-2",
    "outdoor-sofa-set-3",
    "patio-dining-set-1",
    "patio-dining-set-2",
    "patio-dining-set-3",
    "wooden-file-cabinet-1",
    "wooden-file-cabinet-2",
    "wooden-file-cabinet-3",
    "fireproof-file-cabinet-1",
    "fireproof-file-cabinet-2",
    "mobile-pedestal-1",
    "mobile-pedestal-2",
    "mobile-pedestal-3",
    "lateral-file-cabinet-1",
    "lateral-file-cabinet-2",
    "lateral-file-cabinet-3",
    "3-drawer-filing-cabinet-1",
    "3-drawer-filing-cabinet-2",
    "3-drawer-filing-cabinet-3",
    "gaming-office-chair-1",
    "gaming-office-chair-2",
    "gaming-office-chair-3",
    "task-chair-1",
    "task-chair-2",
    "task-chair-3",
    "kneeling-chair-1",
    "kneeling-chair-2",
    "ergonomic-mesh-chair-1",
    "ergonomic-mesh-chair-2",
    "executive-office-chair-1",
    "executive-office-chair-2",
    "standing-desk-1",
    "standing-desk-2",
    "compact-writing-desk-1",
    "compact-writing-desk-2",
    "compact-writing-desk-3",
    "industrial-desk-1",
    "industrial-desk-2",
    "industrial-desk-3",
    "l-shaped-corner-desk-1",
    "l-shaped-corner-desk-2",
    "ergonomic-desk-1",
    "ergonomic-desk-2",
    "compact-credenza-1",
    "compact-credenza-2",
    "compact-credenza-3",
    "industrial-buffet-1",
    "industrial-buffet-2",
    "industrial-buffet-3",
    "wine-cabinet-1",
    "wine-cabinet-2",
    "buffet-cabinet-with-hutch-1",
    "buffet-cabinet-with-hutch-2",
    "modern-sideboard-1",
    "modern-sideboard-2",
    "modern-sideboard-3",
    "industrial-dining-chairs-1",
    "industrial-dining-chairs-2",
    "industrial-dining-chairs-3",
];
