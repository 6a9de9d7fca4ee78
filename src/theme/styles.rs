//! Global CSS styles for JetBizCard.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-reveal: 300ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body, #main {
  height: 100%;
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  line-height: 1.5;
  overflow: hidden;
}

/* === Toggle Button === */
.toggle-button {
  cursor: pointer;
  margin: 8px 0;
  transition: filter var(--transition-fast), box-shadow var(--transition-fast);
}

.toggle-button:hover {
  filter: brightness(1.1);
}

.toggle-button:active {
  box-shadow: 0 4px 8px rgba(0, 0, 0, 0.3);
}

/* === Reveal Panel (fade + expand) === */
.reveal-panel {
  transform-origin: top center;
  animation: reveal-in var(--transition-reveal);
}

@keyframes reveal-in {
  from {
    opacity: 0;
    transform: scaleY(0.6);
  }
  to {
    opacity: 1;
    transform: scaleY(1);
  }
}

/* === Portfolio === */
.portfolio-row {
  border-radius: 0;
}

.avatar img {
  display: block;
}
"#;
