//! Global CSS styles for the Gbillions card generator.
//!
//! Slate backgrounds with sky accents, matching the card's own palette.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds) */
  --slate-950: #020617;
  --slate-900: #0f172a;
  --slate-800: #1e293b;

  /* SKY (Actions, Selection) */
  --sky-400: #38bdf8;
  --sky-500: #0ea5e9;
  --sky-600: #0284c7;
  --blue-600: #2563eb;
  --sky-glow: rgba(56, 189, 248, 0.3);

  /* WHITE OVERLAYS */
  --white-5: rgba(255, 255, 255, 0.05);
  --white-10: rgba(255, 255, 255, 0.1);
  --white-15: rgba(255, 255, 255, 0.15);

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.9);
  --text-muted: rgba(255, 255, 255, 0.6);
  --text-faint: rgba(255, 255, 255, 0.5);

  /* SEMANTIC */
  --danger: #f87171;

  /* Typography */
  --font-sans: Inter, 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--slate-950);
  color: var(--text-primary);
  min-height: 100vh;
}

/* === Layout === */
.generator {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.app-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: rgba(2, 6, 23, 0.9);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--white-10);
}

.app-header__inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.app-header__brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.app-header__logo {
  width: 2rem;
  height: 2rem;
  border-radius: 0.75rem;
  background: linear-gradient(135deg, var(--sky-400), var(--blue-600));
  box-shadow: 0 4px 6px rgba(37, 99, 235, 0.3);
}

.app-title {
  font-size: 1.5rem;
  font-weight: 600;
  letter-spacing: -0.01em;
}

.generator__main {
  max-width: 72rem;
  width: 100%;
  margin: 0 auto;
  padding: 2rem 1rem;
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

@media (min-width: 1024px) {
  .generator__main {
    grid-template-columns: 1fr 1fr;
  }
}

.app-footer {
  max-width: 72rem;
  width: 100%;
  margin: 0 auto;
  padding: 0 1rem 2rem;
  text-align: center;
  font-size: 0.75rem;
  color: var(--text-faint);
}

.app-footer__author {
  font-weight: 600;
}

/* === Customize Panel === */
.panel {
  border: 1px solid var(--white-10);
  border-radius: 1.5rem;
  background: var(--white-5);
  padding: 1.5rem;
  box-shadow: 0 20px 25px rgba(30, 58, 138, 0.2);
}

.panel__title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 1rem;
}

.panel__fields {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.panel__tip {
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Inputs === */
.input-label {
  display: block;
  margin-bottom: 0.5rem;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  background: rgba(15, 23, 42, 0.8);
  border: 1px solid var(--white-10);
  border-radius: 1rem;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 1rem;
}

.input-field:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--sky-500);
}

/* === Buttons === */
.btn-primary {
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 1rem;
  background: linear-gradient(90deg, var(--sky-500), var(--blue-600));
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 1rem;
  cursor: pointer;
  box-shadow: 0 10px 15px rgba(2, 132, 199, 0.3);
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary:hover {
  background: linear-gradient(90deg, var(--sky-400), #3b82f6);
}

.btn-primary:active {
  transform: scale(0.98);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: progress;
}

.btn-secondary,
.btn-small {
  background: var(--white-10);
  border: 1px solid var(--white-10);
  color: var(--text-primary);
  font-family: var(--font-sans);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-secondary {
  padding: 0.5rem 0.75rem;
  border-radius: 0.75rem;
  font-size: 0.875rem;
}

.btn-small {
  padding: 0.375rem 0.625rem;
  border-radius: 0.75rem;
  font-size: 0.75rem;
}

.btn-secondary:hover,
.btn-small:hover {
  background: var(--white-15);
}

/* === Avatar Picker === */
.avatar-picker {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.avatar-picker__error {
  margin-top: 0.5rem;
  font-size: 0.875rem;
  color: var(--danger);
}

/* === Role Toggles === */
.role-toggles__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.5rem;
}

.role-toggles__header .input-label {
  margin-bottom: 0;
}

.role-toggles__bulk {
  display: flex;
  gap: 0.5rem;
}

.role-toggles {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.5rem;
}

.role-toggle {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--white-10);
  border-radius: 1rem;
  background: var(--white-5);
  font-size: 0.875rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.role-toggle:hover {
  background: var(--white-10);
}

.role-toggle.selected {
  background: rgba(14, 165, 233, 0.1);
  border-color: rgba(14, 165, 233, 0.4);
}

/* === Card Preview === */
.preview {
  display: flex;
  align-items: center;
  justify-content: center;
}

.card-preview {
  width: 420px;
  max-width: 100%;
  aspect-ratio: 3 / 4;
  user-select: none;
  filter: drop-shadow(0 0 40px rgba(56, 189, 248, 0.25));
}

.card-preview svg {
  width: 100%;
  height: 100%;
  display: block;
}
"#;
